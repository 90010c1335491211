//! Snak decoding against saved value fragments.

use serde_json::Value;
use wikidata_decode::{
    decode_snak, CalendarValue, ClaimValue, DecodeError, ErrorCode, GlobeCoordinates, Precision,
    Quantity, ValueType,
};

fn fixture(json: &str) -> Value {
    serde_json::from_str(json).unwrap()
}

macro_rules! snak {
    ($path:literal) => {
        decode_snak(&fixture(include_str!(concat!("fixtures/snaks/", $path, ".json"))))
    };
}

#[test]
fn test_commons_media() {
    let claim = snak!("commons_media").unwrap();
    assert_eq!(claim.property, "P18");
    assert_eq!(claim.value_type(), ValueType::Media);
    assert_eq!(
        claim.value,
        ClaimValue::Media("https://commons.wikimedia.org/wiki/File:Test.svg".into())
    );
}

#[test]
fn test_text_values() {
    let claim = snak!("monolingual_text").unwrap();
    assert_eq!(claim.value, ClaimValue::Text("Бастиа Фредерик".into()));
    assert_eq!(claim.value_type(), ValueType::Text);

    let claim = snak!("string").unwrap();
    assert_eq!(claim.value, ClaimValue::Text("Hello".into()));

    let claim = snak!("url").unwrap();
    assert_eq!(
        claim.value,
        ClaimValue::Url("https://github.com/bradleymarques/gimme_wikidata".into())
    );

    let claim = snak!("math").unwrap();
    assert_eq!(claim.value, ClaimValue::Math("test".into()));
    assert_eq!(claim.value_type(), ValueType::Math);

    let claim = snak!("external_id").unwrap();
    assert_eq!(claim.value, ClaimValue::ExternalId("Zorg".into()));
    assert_eq!(claim.value_type().as_str(), "external_id");
}

#[test]
fn test_globe_coordinate() {
    let claim = snak!("globe_coordinate").unwrap();
    assert_eq!(claim.value_type(), ValueType::GpsCoordinates);
    assert_eq!(
        claim.value,
        ClaimValue::Coordinates(GlobeCoordinates {
            latitude: 40.748433,
            longitude: -73.985656
        })
    );
}

#[test]
fn test_quantity() {
    let claim = snak!("quantity").unwrap();
    assert_eq!(claim.value_type(), ValueType::Quantity);
    assert_eq!(
        claim.value,
        ClaimValue::Quantity(Quantity {
            amount: 100.0,
            upper_bound: Some(101.0),
            lower_bound: Some(99.0),
            unit: 1
        })
    );
}

#[test]
fn test_wikibase_item() {
    let claim = snak!("wikibase_item").unwrap();
    assert_eq!(claim.value_type(), ValueType::Entity);
    assert_eq!(claim.value.as_entity().unwrap(), "Q5");
}

#[test]
fn test_unsupported_value_type() {
    let err = snak!("unsupported").unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnsupportedSnakType {
            value_type: "geo-shape-v9".into()
        }
    );
    assert_eq!(err.code(), ErrorCode::UnsupportedSnakType);
}

fn date(path: &str) -> CalendarValue {
    let json = match path {
        "billion_years" => include_str!("fixtures/snaks/time/billion_years.json"),
        "hundred_million_years" => include_str!("fixtures/snaks/time/hundred_million_years.json"),
        "ten_million_years" => include_str!("fixtures/snaks/time/ten_million_years.json"),
        "million_years" => include_str!("fixtures/snaks/time/million_years.json"),
        "hundred_thousand_years" => include_str!("fixtures/snaks/time/hundred_thousand_years.json"),
        "ten_thousand_years" => include_str!("fixtures/snaks/time/ten_thousand_years.json"),
        "millennium" => include_str!("fixtures/snaks/time/millennium.json"),
        "century" => include_str!("fixtures/snaks/time/century.json"),
        "decade" => include_str!("fixtures/snaks/time/decade.json"),
        "year" => include_str!("fixtures/snaks/time/year.json"),
        "month" => include_str!("fixtures/snaks/time/month.json"),
        "day" => include_str!("fixtures/snaks/time/day.json"),
        "hour" => include_str!("fixtures/snaks/time/hour.json"),
        "minute" => include_str!("fixtures/snaks/time/minute.json"),
        "second" => include_str!("fixtures/snaks/time/second.json"),
        other => panic!("no time fixture {other}"),
    };
    let claim = decode_snak(&fixture(json)).unwrap();
    assert_eq!(claim.value_type(), ValueType::CarbonDate);
    *claim.value.as_date().unwrap()
}

#[test]
fn test_time_coarse_precisions() {
    use Precision::*;

    assert_eq!(date("billion_years"), CalendarValue::new(-4_540_000_000, BillionYears));
    assert_eq!(
        date("hundred_million_years"),
        CalendarValue::new(-4_540_000_000, HundredMillionYears)
    );
    assert_eq!(date("ten_million_years"), CalendarValue::new(-4_540_000_000, TenMillionYears));
    assert_eq!(date("million_years"), CalendarValue::new(-4_540_000_000, MillionYears));
    assert_eq!(
        date("hundred_thousand_years"),
        CalendarValue::new(-4_540_000, HundredThousandYears)
    );
    assert_eq!(date("ten_thousand_years"), CalendarValue::new(-10_001, TenThousandYears));
    assert_eq!(date("millennium"), CalendarValue::new(2000, Millennium));
    assert_eq!(date("century"), CalendarValue::new(1405, Century));
    assert_eq!(date("decade"), CalendarValue::new(1972, Decade));
    assert_eq!(date("year"), CalendarValue::new(1972, Year));
}

#[test]
fn test_time_fine_precisions() {
    use Precision::*;

    assert_eq!(date("month"), CalendarValue::new(1972, Month).with_month(5));
    assert_eq!(
        date("day"),
        CalendarValue::new(1940, Day).with_month(10).with_day(10)
    );
    assert_ne!(
        date("day"),
        CalendarValue::new(1940, Day).with_month(10).with_day(11)
    );
    assert_eq!(
        date("hour"),
        CalendarValue::new(1972, Hour).with_month(5).with_day(1).with_hour(15)
    );
    assert_eq!(
        date("minute"),
        CalendarValue::new(1972, Minute)
            .with_month(5)
            .with_day(1)
            .with_hour(15)
            .with_minute(43)
    );
    let second = date("second");
    assert_eq!(
        second,
        CalendarValue::new(1972, Second)
            .with_month(5)
            .with_day(1)
            .with_hour(15)
            .with_minute(43)
            .with_second(4)
    );
    assert_eq!(second.to_string(), "1972-05-01T15:43:04");
}

#[test]
fn test_time_century_stores_rounded_year() {
    let century = date("century");
    assert_eq!(century.year(), 1400);
    assert_eq!(century, CalendarValue::new(1450, Precision::Century));
    assert_ne!(century, CalendarValue::new(1500, Precision::Century));
}

#[test]
fn test_time_bad_precision() {
    let err = snak!("time/bad_precision").unwrap_err();
    assert_eq!(err, DecodeError::UnsupportedPrecision { code: 15 });
    assert_eq!(err.code().code(), "E004");
}
