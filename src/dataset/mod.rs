//! Launch Dataset
//!
//! Loads the launch records CSV once at startup into an immutable,
//! shareable [`LaunchTable`].
//!
//! ## Expected columns
//!
//! | Header                     | Required | Meaning                         |
//! |----------------------------|----------|---------------------------------|
//! | `Launch Site`              | yes      | launch site identifier          |
//! | `Payload Mass (kg)`        | yes      | payload mass in kilograms       |
//! | `Booster Version Category` | yes      | booster family (v1.0, FT, B5..) |
//! | `class`                    | yes      | outcome, 1 = success            |
//! | `Flight Number`            | no       | flight sequence number          |
//! | `Booster Version`          | no       | full booster designation        |

mod error;
mod loader;
mod types;

pub use error::{LoadError, LoadResult};
pub use loader::{load_table, load_table_from_reader, ColumnNames, LaunchLoader};
pub use types::{LaunchRecord, LaunchTable, Outcome, PayloadBounds};
