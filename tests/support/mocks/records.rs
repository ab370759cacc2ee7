// tests/support/mocks/records.rs
use chrono::{NaiveDate, NaiveTime};
use reservafacil_front::domain::audit::{AuditCode, AuditRecord, LedgerTimestamp};
use reservafacil_front::domain::reservation::{Reservation, ReservationId};

pub fn sample_record(code: i64, action: &str, user: &str) -> AuditRecord {
    AuditRecord::new(
        AuditCode::Integer(code),
        action,
        LedgerTimestamp::parse("2024-01-01T00:00:00Z").unwrap(),
        user,
        format!("{action} by {user}"),
        "users",
    )
}

pub fn sample_reservation(id: i64, table: i32) -> Reservation {
    Reservation {
        id: ReservationId(id),
        date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
        time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
        status: "confirmada".into(),
        detail: Some("mesa junto a la ventana".into()),
        responsible_user: "alice".into(),
        table_number: table,
    }
}
