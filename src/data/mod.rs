/// Data layer: validation-trace types and loading.
///
/// Architecture:
/// ```text
///      lt_vf.txt
///         │
///         ▼
///    ┌──────────┐
///    │  loader   │  parse whitespace table → ValidationTable
///    └──────────┘
///         │
///         ▼
///    ┌─────────────────┐
///    │ ValidationTable  │  Vec<ValidationRecord>, derived error series
///    └─────────────────┘
/// ```

pub mod loader;
pub mod model;
