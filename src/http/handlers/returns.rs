use crate::domain::return_request::ReturnSubmission;
use crate::model::ImageAttachment;
use crate::repo::ReturnRecord;
use crate::service::return_service::UploadedImage;
use crate::AppState;
use axum::extract::{Multipart, Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

pub async fn analyze_return(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut submission: Option<ReturnSubmission> = None;
    let mut images: Vec<UploadedImage> = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return bad_request(&format!("malformed multipart body: {}", e)),
        };

        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "return_data" => {
                let text = match field.text().await {
                    Ok(text) => text,
                    Err(e) => return bad_request(&format!("unreadable return_data field: {}", e)),
                };
                match serde_json::from_str(&text) {
                    Ok(parsed) => submission = Some(parsed),
                    Err(e) => return bad_request(&format!("invalid return_data JSON: {}", e)),
                }
            }
            "images" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes,
                    Err(e) => return bad_request(&format!("unreadable image field: {}", e)),
                };
                match decode_image(file_name, &bytes) {
                    Ok(image) => images.push(image),
                    Err(message) => return bad_request(&message),
                }
            }
            _ => {}
        }
    }

    let Some(submission) = submission else {
        return bad_request("missing return_data field");
    };

    match state.return_service.process(submission, images).await {
        Ok(resp) => (axum::http::StatusCode::OK, Json(resp)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn get_return(State(state): State<AppState>, Path(return_id): Path<Uuid>) -> Response {
    match state.store.get_return(return_id).await {
        Ok(Some(record)) => {
            (axum::http::StatusCode::OK, Json(serde_json::Value::Object(record))).into_response()
        }
        Ok(None) => (
            axum::http::StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "return not found"})),
        )
            .into_response(),
        Err(e) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

pub async fn update_return_status(
    State(state): State<AppState>,
    Path(return_id): Path<Uuid>,
    Json(fields): Json<ReturnRecord>,
) -> Response {
    match state.store.update_return_status(return_id, fields).await {
        Ok(true) => {
            (axum::http::StatusCode::OK, Json(serde_json::json!({"updated": true}))).into_response()
        }
        Ok(false) => (
            axum::http::StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "return not found"})),
        )
            .into_response(),
        Err(e) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}

fn decode_image(file_name: String, bytes: &[u8]) -> Result<UploadedImage, String> {
    let format = image::guess_format(bytes)
        .map_err(|_| format!("{}: unrecognized image format", file_name))?;
    image::load_from_memory_with_format(bytes, format)
        .map_err(|e| format!("{}: undecodable image: {}", file_name, e))?;

    Ok(UploadedImage {
        file_name,
        attachment: ImageAttachment {
            mime_type: format.to_mime_type().to_string(),
            data: bytes.to_vec(),
        },
    })
}

fn bad_request(message: &str) -> Response {
    (
        axum::http::StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": message})),
    )
        .into_response()
}
