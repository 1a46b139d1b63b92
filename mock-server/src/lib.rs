use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Id segment of the listing endpoint (`/v3/{LIST_ID}`).
pub const LIST_ID: &str = "e8c52b55-7f44-41a8-b059-5d042269b520";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub location: Option<String>,
    pub price: Option<String>,
    pub main_photo: String,
    pub details_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListResponse {
    #[serde(rename = "Result")]
    pub result: Vec<Listing>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Overview {
    pub location: Option<String>,
    pub price: Option<String>,
    pub photos: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Details {
    pub id: String,
    pub sale_status: String,
    pub title: String,
    pub overview: Overview,
    pub comments: String,
}

/// Everything the server can answer, keyed by the last segment of
/// `details_url`.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    pub listings: Vec<Listing>,
    pub details: HashMap<String, Details>,
}

impl Inventory {
    pub fn insert(&mut self, listing: Listing, details: Details) {
        let key = listing
            .details_url
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        self.listings.push(listing);
        self.details.insert(key, details);
    }

    /// Two listings: a Triton with a price and a C300 without one.
    pub fn sample() -> Self {
        let photo = "https://carsales.pxcrush.net/carsales/car/cil/bjk2g3yi1gxy2xfg6xf9ugyd7.jpg";
        let mut inventory = Self::default();
        inventory.insert(
            Listing {
                id: "AD-5989286".to_string(),
                title: "2019 Mitsubishi Triton GLS MR Auto 4x4 MY19 Double Cab".to_string(),
                location: Some("Victoria".to_string()),
                price: Some("$53,081".to_string()),
                main_photo: photo.to_string(),
                details_url: "/v3/9ea9359e-c29d-4493-ad02-69662dcb5586".to_string(),
            },
            Details {
                id: "AD-5989286".to_string(),
                sale_status: "Available".to_string(),
                title: "2019 Mitsubishi Triton GLS MR Auto 4x4 MY19 Double Cab".to_string(),
                overview: Overview {
                    location: Some("Victoria".to_string()),
                    price: Some("$53,081".to_string()),
                    photos: vec![photo.to_string()],
                },
                comments: "Car details".to_string(),
            },
        );
        inventory.insert(
            Listing {
                id: "AD-5989287".to_string(),
                title: "Mercedes Benz C300 Coupe".to_string(),
                location: None,
                price: None,
                main_photo: photo.to_string(),
                details_url: "/v3/9ea9359e-c29d-4493-ad02-69662dcb5589".to_string(),
            },
            Details {
                id: "AD-5989287".to_string(),
                sale_status: "Coming Soon".to_string(),
                title: "Mercedes Benz C300 Coupe".to_string(),
                overview: Overview {
                    location: None,
                    price: None,
                    photos: Vec::new(),
                },
                comments: String::new(),
            },
        );
        inventory
    }
}

pub type Db = Arc<Inventory>;

pub fn app() -> Router {
    app_with(Inventory::sample())
}

pub fn app_with(inventory: Inventory) -> Router {
    let db: Db = Arc::new(inventory);
    Router::new()
        .route("/v3/{id}", get(get_resource))
        .route("/status/{code}", get(respond_with_status))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_resource(State(db): State<Db>, Path(id): Path<String>) -> Response {
    if id == LIST_ID {
        tracing::info!(count = db.listings.len(), "serving listing");
        return Json(ListResponse {
            result: db.listings.clone(),
        })
        .into_response();
    }
    match db.details.get(&id) {
        Some(details) => {
            tracing::info!(%id, "serving details");
            Json(details.clone()).into_response()
        }
        None => {
            tracing::info!(%id, "unknown resource");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

async fn respond_with_status(Path(code): Path<u16>) -> Response {
    match StatusCode::from_u16(code) {
        Ok(status) => (status, format!("status {code}")).into_response(),
        Err(_) => StatusCode::BAD_REQUEST.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_serializes_with_wire_keys() {
        let listing = Inventory::sample().listings[0].clone();
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["Id"], "AD-5989286");
        assert_eq!(json["MainPhoto"], listing.main_photo);
        assert_eq!(json["DetailsUrl"], "/v3/9ea9359e-c29d-4493-ad02-69662dcb5586");
        assert_eq!(json["Price"], "$53,081");
    }

    #[test]
    fn missing_price_serializes_as_null() {
        let listing = Inventory::sample().listings[1].clone();
        let json = serde_json::to_value(&listing).unwrap();
        assert!(json["Price"].is_null());
        assert!(json["Location"].is_null());
    }

    #[test]
    fn details_serialize_nested_overview() {
        let inventory = Inventory::sample();
        let details = &inventory.details["9ea9359e-c29d-4493-ad02-69662dcb5586"];
        let json = serde_json::to_value(details).unwrap();
        assert_eq!(json["SaleStatus"], "Available");
        assert_eq!(json["Overview"]["Photos"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn list_response_uses_result_key() {
        let response = ListResponse {
            result: Inventory::sample().listings,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["Result"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn insert_keys_details_by_last_path_segment() {
        let inventory = Inventory::sample();
        assert!(inventory.details.contains_key("9ea9359e-c29d-4493-ad02-69662dcb5589"));
        assert_eq!(inventory.listings.len(), inventory.details.len());
    }
}
