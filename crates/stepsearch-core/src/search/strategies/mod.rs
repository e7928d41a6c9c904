//! The four step-size strategies.
//!
//! Each strategy is a plain function; [`StepSearcher`](crate::search::StepSearcher)
//! picks one by matching on the configured [`SearchMethod`](crate::config::SearchMethod).

mod armijo;
mod best;
mod constant;
mod wolfe;

pub(crate) use armijo::armijo;
pub(crate) use best::best;
pub(crate) use constant::constant;
pub(crate) use wolfe::wolfe;
