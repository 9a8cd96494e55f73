//! Tests for timestamp normalization and encoding.

use std::time::{Duration, SystemTime};

use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, TimeZone, Utc};

use super::Timestamp;

fn naive(h: u32, m: u32, s: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 1, 1)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

mod encoding {
    use super::*;

    #[test]
    fn utc_instant_uses_z_suffix() {
        let ts = Timestamp::from(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(ts.to_wire(), "2021-01-01T00:00:00Z");
    }

    #[test]
    fn offset_is_normalized_to_utc() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let ts = Timestamp::from(offset.with_ymd_and_hms(2021, 1, 1, 2, 0, 0).unwrap());

        assert_eq!(ts.to_wire(), "2021-01-01T00:00:00Z");
        assert_eq!(ts.as_datetime().offset(), &offset);
    }

    #[test]
    fn fractional_seconds_only_when_present() {
        let dt = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap() + TimeDelta::milliseconds(250);
        assert_eq!(Timestamp::from(dt).to_wire(), "2021-01-01T00:00:00.250Z");
    }

    #[test]
    fn serializes_as_string() {
        let ts = Timestamp::from(naive(12, 30, 0));
        let json = serde_json::to_string(&ts).unwrap();

        assert_eq!(json, r#""2021-01-01T12:30:00Z""#);
    }

    #[test]
    fn display_matches_wire_format() {
        let ts = Timestamp::from(naive(1, 2, 3));
        assert_eq!(ts.to_string(), ts.to_wire());
    }
}

mod conversions {
    use super::*;

    #[test]
    fn naive_date_time_defaults_to_utc() {
        let ts = Timestamp::from(naive(8, 0, 0));

        assert_eq!(ts.as_datetime().offset().local_minus_utc(), 0);
        assert_eq!(ts.to_wire(), "2021-01-01T08:00:00Z");
    }

    #[test]
    fn system_time_converts_to_utc() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        assert_eq!(Timestamp::from(time).to_wire(), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn local_time_keeps_instant() {
        let utc = Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap();
        let local = utc.with_timezone(&chrono::Local);

        assert_eq!(Timestamp::from(local), Timestamp::from(utc));
    }

    #[test]
    fn same_instant_different_offsets_encode_identically() {
        let utc = Timestamp::from(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap());
        let shifted: DateTime<FixedOffset> =
            DateTime::parse_from_rfc3339("2020-12-31T19:00:00-05:00").unwrap();

        assert_eq!(Timestamp::from(shifted).to_wire(), utc.to_wire());
    }
}

mod parsing {
    use super::*;

    #[test]
    fn parses_rfc3339() {
        let ts: Timestamp = "2021-01-01T01:00:00+01:00".parse().unwrap();
        assert_eq!(ts.to_wire(), "2021-01-01T00:00:00Z");
    }

    #[test]
    fn parses_naive_as_utc() {
        let ts: Timestamp = "2021-01-01T08:15:00".parse().unwrap();
        assert_eq!(ts.to_wire(), "2021-01-01T08:15:00Z");

        let ts: Timestamp = "2021-01-01 08:15:00".parse().unwrap();
        assert_eq!(ts.to_wire(), "2021-01-01T08:15:00Z");
    }

    #[test]
    fn rejects_garbage() {
        let err = "yesterday".parse::<Timestamp>().unwrap_err();
        assert_eq!(err.value, "yesterday");
    }
}
