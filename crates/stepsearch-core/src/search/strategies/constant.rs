use crate::{
    config::SearchConfig,
    search::result::{LineSearchResult, Termination},
    types::Scalar,
};

/// Returns the configured fixed step without touching the oracle.
pub(crate) fn constant<T: Scalar>(config: &SearchConfig<T>) -> LineSearchResult<T> {
    LineSearchResult::success(config.c, Termination::Fixed)
}
