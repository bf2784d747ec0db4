use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Error payload shape shared by all JSON endpoints.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}
