//! Route tree construction for the rove router compiler.
//!
//! This crate is the front half of the compiler: it walks an `app/` directory
//! that follows the `page`/`layout`/`loading`/`error`/`not-found` file
//! convention, classifies each directory name into a route segment, and
//! flattens the resulting tree into an ordered list of resolved routes with
//! their inherited layout chains and fallback components.
//!
//! Everything here is synchronous and infallible by design: a missing app
//! directory, a route-less tree, or a malformed segment name degrades to a
//! well-defined fallback (empty scan, empty route list, static segment)
//! rather than an error. Unexpected filesystem conditions are logged through
//! `tracing` and skipped.
//!
//! ```no_run
//! use rove_core::{Scanner, flatten};
//!
//! let scan = Scanner::new("/project/app").scan();
//! let routes = flatten(&scan);
//! for route in &routes {
//!     println!("{} -> {}", route.pattern, route.page.display());
//! }
//! ```

mod flatten;
mod model;
mod scan;
mod segment;

pub use flatten::flatten;
pub use model::{ConventionFiles, ResolvedRoute, RouteNode};
pub use scan::{AppScan, CONVENTION_BASENAMES, DEFAULT_EXTENSIONS, Scanner};
pub use segment::{Segment, SegmentKind, classify};
