use easypay::domain::payment::Payment;
use easypay::domain::payment_type::PaymentType;
use easypay::error::PaymentError;
use rand::Rng;
use rust_decimal::Decimal;

const SAMPLES: usize = 500;

#[test]
fn test_any_positive_value_is_stored() {
    let mut rng = rand::thread_rng();
    let mut payment = Payment::new();

    for _ in 0..SAMPLES {
        let cents: i64 = rng.gen_range(1..=100_000_000);
        let value = Decimal::new(cents, 2);

        payment.set_value(value).unwrap();
        assert_eq!(payment.value().unwrap().value(), value);
        assert!(payment.is_valid());
    }
}

#[test]
fn test_any_non_positive_value_is_rejected() {
    let mut rng = rand::thread_rng();
    let mut payment = Payment::new();
    let kept = Decimal::new(4_200, 2);
    payment.set_value(kept).unwrap();

    for _ in 0..SAMPLES {
        let cents: i64 = rng.gen_range(-100_000_000..=0);
        let result = payment.set_value(Decimal::new(cents, 2));

        assert!(matches!(result, Err(PaymentError::InvalidArgument(_))));
        assert_eq!(payment.value().unwrap().value(), kept);
    }
}

#[test]
fn test_positive_floats_are_accepted() {
    let mut rng = rand::thread_rng();
    let mut payment = Payment::new();

    for _ in 0..SAMPLES {
        let mantissa: f64 = rng.gen_range(1.0..10.0);
        let exponent: i32 = rng.gen_range(-20..=27);
        let value = mantissa * 10f64.powi(exponent);

        payment.set_value(value).unwrap();
        assert!(payment.value().unwrap().value() > Decimal::ZERO, "{value:e}");
    }
}

#[test]
fn test_floats_beyond_decimal_range_are_rejected_and_keep_value() {
    let mut payment = Payment::new();
    payment.set_value(19.99).unwrap();
    let kept = payment.value().unwrap().value();

    for value in [1e-30, 1e30] {
        let err = payment.set_value(value).unwrap_err();
        assert!(
            matches!(&err, PaymentError::InvalidArgument(msg) if msg == "Value is outside the supported range"),
            "{value:e}: {err}"
        );
        assert_eq!(payment.value().unwrap().value(), kept);
    }
}

#[test]
fn test_unknown_types_never_change_the_type() {
    let mut payment = Payment::new();
    payment.set_type("boleto").unwrap();

    for candidate in ["credit", "Normal", "BOLETO", "", "moto ", "mbway"] {
        assert!(payment.set_type(candidate).is_err(), "{candidate:?} accepted");
        assert_eq!(payment.payment_type(), PaymentType::Boleto);
    }
}

#[test]
fn test_every_day_of_a_leap_year_round_trips() {
    let mut payment = Payment::new();
    let mut day = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    while day.format("%Y").to_string() == "2024" {
        let text = day.format("%Y-%m-%d").to_string();
        payment.set_max_date(&text).unwrap();
        assert_eq!(payment.max_date().unwrap().to_string(), text);
        day = day.succ_opt().unwrap();
    }
}
