//! Chemical name normalization.
//!
//! EU and US feeds spell the same substance differently ("Sodium benzoate",
//! "SODIUM BENZOATE", "sodium-benzoate"). Both sides are reduced to a
//! [`NormalizedName`] and compared by exact string equality.
//!
//! # Steps (legacy mode)
//!
//! 1. Lower-case and trim
//! 2. Replace `-`, `,`, `(`, `)` with a space
//! 3. Replace each non-overlapping double space with one space (single pass)
//! 4. Strip leading prefixes from [`PREFIXES`], checked in order
//! 5. Trim
//!
//! Step 2 runs before step 4, so the hyphenated prefixes never match in
//! legacy mode. [`NormalizationMode::Canonical`] strips prefixes first and
//! collapses every whitespace run.
//!
//! # Example
//!
//! ```
//! use additives_normalization::normalize_name;
//!
//! assert_eq!(normalize_name("Sodium Benzoate (E211)").as_str(), "sodium benzoate e211");
//! assert_eq!(normalize_name("E Curcumin").as_str(), "curcumin");
//! ```

mod name;
mod normalize;
mod options;

pub use name::NormalizedName;
pub use normalize::{PREFIXES, normalize_name, normalize_name_with};
pub use options::NormalizationMode;
