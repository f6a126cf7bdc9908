//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the embedded migrations exactly. The
//! `diesel print-schema` command can regenerate them from a live database.

diesel::table! {
    /// Employee directory records.
    ///
    /// `id` is a `SERIAL` primary key assigned by the store. The timestamp
    /// columns are store-managed and never exposed through the API.
    employees (id) {
        id -> Int4,
        /// Display name (max 255 characters).
        #[max_length = 255]
        name -> Varchar,
        /// Job role (max 255 characters).
        #[max_length = 255]
        role -> Varchar,
        created_at -> Nullable<Timestamp>,
        updated_at -> Nullable<Timestamp>,
    }
}
