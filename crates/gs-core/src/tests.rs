//! Unit tests for gs-core primitives.

#[cfg(test)]
mod ids {
    use crate::{RequestSeq, StationIdx};

    #[test]
    fn index_roundtrip() {
        let id = StationIdx(4);
        assert_eq!(id.index(), 4);
        assert_eq!(StationIdx::try_from(4usize).unwrap(), id);
    }

    #[test]
    fn ordering_follows_load_order() {
        assert!(StationIdx(0) < StationIdx(1));
    }

    #[test]
    fn request_seq_next() {
        assert_eq!(RequestSeq(1).next(), RequestSeq(2));
    }

    #[test]
    fn display() {
        assert_eq!(StationIdx(7).to_string(), "StationIdx(7)");
    }
}

#[cfg(test)]
mod fuel {
    use crate::{Fuel, FuelGrade};

    #[test]
    fn parses_cyrillic_and_latin() {
        assert_eq!(FuelGrade::parse("АИ-95"), Some(FuelGrade::Ai95));
        assert_eq!(FuelGrade::parse("AI-92"), Some(FuelGrade::Ai92));
        assert_eq!(FuelGrade::parse("ai-80"), Some(FuelGrade::Ai80));
        assert_eq!(FuelGrade::parse("аи-98"), Some(FuelGrade::Ai98));
    }

    #[test]
    fn rejects_unknown_octane() {
        assert_eq!(FuelGrade::parse("АИ-100"), None);
        assert_eq!(FuelGrade::parse("ДТ"), None);
        assert_eq!(FuelGrade::parse("A"), None);
    }

    #[test]
    fn latin_and_cyrillic_spellings_compare_equal() {
        assert_eq!(Fuel::parse("AI-95"), Fuel::parse("АИ-95"));
    }

    #[test]
    fn other_labels_kept_verbatim() {
        let fuel = Fuel::parse("ДТ");
        assert_eq!(fuel, Fuel::Other("ДТ".into()));
        assert_eq!(fuel.grade(), None);
        assert_eq!(fuel.to_string(), "ДТ");
    }

    #[test]
    fn canonical_order_and_labels() {
        let labels: Vec<_> = FuelGrade::ALL.iter().map(|g| g.as_str()).collect();
        assert_eq!(labels, ["АИ-80", "АИ-92", "АИ-95", "АИ-98"]);
        for (i, g) in FuelGrade::ALL.iter().enumerate() {
            assert_eq!(g.index(), i);
        }
    }
}

#[cfg(test)]
mod time {
    use chrono::NaiveDate;

    use crate::{ArrivalClock, MalformedPolicy, SalesAttribution, SimConfig};

    fn clock() -> ArrivalClock {
        ArrivalClock::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    }

    #[test]
    fn parse_and_stamp() {
        let t = ArrivalClock::parse_hhmm("09:05").unwrap();
        let at = clock().stamp(t);
        assert_eq!(at.to_string(), "2024-03-01 09:05:00");
        assert_eq!(ArrivalClock::hhmm(at), "09:05");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(ArrivalClock::parse_hhmm("9h05").is_err());
        assert!(ArrivalClock::parse_hhmm("25:00").is_err());
        assert!(ArrivalClock::parse_hhmm("").is_err());
    }

    #[test]
    fn after_adds_minutes() {
        let at = clock().stamp(ArrivalClock::parse_hhmm("09:58").unwrap());
        assert_eq!(ArrivalClock::hhmm(ArrivalClock::after(at, 5)), "10:03");
    }

    #[test]
    fn config_defaults() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.liters_per_minute, 10);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.sales_attribution, SalesAttribution::TriggeringRequest);
        assert_eq!(cfg.on_malformed, MalformedPolicy::Skip);
        assert_eq!(cfg.make_clock().date, cfg.date);
    }
}

#[cfg(test)]
mod rng {
    use crate::{FixedJitter, Jitter, SeededJitter};

    #[test]
    fn deterministic_same_seed() {
        let mut a = SeededJitter::seeded(12345);
        let mut b = SeededJitter::seeded(12345);
        for _ in 0..100 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn seeded_jitter_in_bounds_and_covers_range() {
        let mut j = SeededJitter::seeded(7);
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let v = j.draw();
            assert!((-1..=1).contains(&v));
            seen[(v + 1) as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn fixed_jitter_clamps() {
        assert_eq!(FixedJitter(0).draw(), 0);
        assert_eq!(FixedJitter(5).draw(), 1);
        assert_eq!(FixedJitter(-3).draw(), -1);
    }

    #[test]
    fn boxed_jitter_delegates() {
        let mut j: Box<dyn Jitter> = Box::new(FixedJitter(-1));
        assert_eq!(j.draw(), -1);
    }
}
