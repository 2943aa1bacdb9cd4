//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `backend/migrations`.
//! Regenerate with `diesel print-schema` when the migrations change.

diesel::table! {
    /// Fleet vehicles.
    ///
    /// `shortcode` is constrained to exactly four characters by a CHECK
    /// constraint in addition to domain validation.
    vehicles (id) {
        /// Primary key assigned by the `BIGSERIAL` sequence.
        id -> Int8,
        shortcode -> Varchar,
        battery -> Float8,
        latitude -> Float8,
        longitude -> Float8,
        created_at -> Timestamptz,
    }
}
