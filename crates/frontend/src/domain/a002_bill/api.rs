use crate::shared::api_utils::{post_json, CREATE_BILL_PATH};
use contracts::domain::a002_bill::{CreateBillRequest, CreateBillResponse};
use contracts::shared::api_error::ApiError;

/// Creates a bill and returns its id
pub async fn create_bill(request: &CreateBillRequest) -> Result<String, ApiError> {
    let response: CreateBillResponse = post_json(CREATE_BILL_PATH, request).await?;
    response.into_bill_id()
}
