//! Build script for loopdeck-storage.
//!
//! Migrations are embedded with `sqlx::migrate!`, so edits to the SQL files
//! must trigger a rebuild.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
