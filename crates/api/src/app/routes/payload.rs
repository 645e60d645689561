use axum::Json;

use mockapi_core::ManyFieldsPayload;

pub async fn many_fields_payload() -> Json<ManyFieldsPayload> {
    Json(ManyFieldsPayload::canned())
}
