use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::common::args::{ASSET_SCHEMA, ArgError, ArgValue, JOB_ID_SCHEMA, check_args};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    pub job_id: u64,
}

impl JobQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ArgError> {
        let mut values = check_args(params, JOB_ID_SCHEMA)?.into_iter();
        Ok(Self {
            job_id: next_integer(&mut values, "jobID")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetQuery {
    pub job_id: u64,
    pub asset_name: String,
}

impl AssetQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ArgError> {
        let mut values = check_args(params, ASSET_SCHEMA)?.into_iter();
        Ok(Self {
            job_id: next_integer(&mut values, "jobID")?,
            asset_name: values
                .next()
                .and_then(ArgValue::into_text)
                .ok_or_else(|| ArgError::WrongType("assetName".to_string()))?,
        })
    }
}

fn next_integer(values: &mut impl Iterator<Item = ArgValue>, name: &str) -> Result<u64, ArgError> {
    values
        .next()
        .and_then(ArgValue::into_integer)
        .ok_or_else(|| ArgError::WrongType(name.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct JobStatusResponse {
    pub exists: bool,
    pub complete: bool,
}
