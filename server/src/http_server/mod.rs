use axum::response::Response;

use errors::*;

pub(crate) mod cmd;

pub(crate) mod pages {
    pub mod contact;
    pub mod not_found;
    pub mod versions;
}

mod config;
pub mod errors;
pub(crate) mod routes;
mod templates;
mod trace;

#[cfg(test)]
pub(crate) mod test_helpers;

type ResponseResult<T = Response> = Result<T, MietteError>;
