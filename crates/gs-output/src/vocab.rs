//! Localized labels used by the text report.
//!
//! A JSON vocabulary may name any subset of the fields; missing ones fall
//! back to the Russian table:
//!
//! ```json
//! { "new_client": "new client:", "liters": "l" }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::OutputResult;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Between the arrival time and the request echo on an assignment line.
    pub new_client:   String,
    /// Before the station id on an assignment line.
    pub in_line:      String,
    /// Between the arrival time and the request echo on a rejection line.
    pub client_left:  String,
    /// Closes a rejection line.
    pub full_lines:   String,
    /// Before the client display id on a served line.
    pub transport_id: String,
    /// Before the station id on a served line.
    pub served_in:    String,
    pub station_num:  String,
    pub max_line:     String,
    pub petrol_type:  String,
    /// Minutes unit in snapshot lines.
    pub min:          String,
    /// Liters unit in sales lines.
    pub liters:       String,
}

impl Vocabulary {
    pub fn russian() -> Self {
        Self {
            new_client:   "новый клиент:".into(),
            in_line:      "встал в очередь к автомату №".into(),
            client_left:  "новый клиент:".into(),
            full_lines:   "не смог заправить автомобиль и покинул АЗС.".into(),
            transport_id: "клиент".into(),
            served_in:    "заправил свой автомобиль и покинул автомат №".into(),
            station_num:  "Автомат №".into(),
            max_line:     "максимальная очередь:".into(),
            petrol_type:  "Марки бензина:".into(),
            min:          "мин.".into(),
            liters:       "л.".into(),
        }
    }

    pub fn english() -> Self {
        Self {
            new_client:   "new client:".into(),
            in_line:      "joined the line at station".into(),
            client_left:  "new client:".into(),
            full_lines:   "could not refuel and left (all lines full).".into(),
            transport_id: "client".into(),
            served_in:    "refuelled and left station".into(),
            station_num:  "Station".into(),
            max_line:     "max line:".into(),
            petrol_type:  "fuels:".into(),
            min:          "min".into(),
            liters:       "l".into(),
        }
    }

    /// Built-in table for a language code (`ru`, `en`).
    pub fn for_lang(lang: &str) -> Option<Self> {
        match lang.to_ascii_lowercase().as_str() {
            "ru" => Some(Self::russian()),
            "en" => Some(Self::english()),
            _ => None,
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> OutputResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_path(path: &Path) -> OutputResult<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::russian()
    }
}
