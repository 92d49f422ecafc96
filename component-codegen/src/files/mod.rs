//! Generators for each file in a scaffolded component directory.

mod component_tsx;
mod consts_ts;
mod graphql_ts;
mod index_ts;
mod styles_tsx;
mod types_ts;

pub use component_tsx::ComponentTsx;
pub use consts_ts::ConstsTs;
pub use graphql_ts::GraphqlTs;
pub use index_ts::IndexTs;
pub use styles_tsx::StylesTsx;
pub use types_ts::TypesTs;
