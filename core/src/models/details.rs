//! The details endpoint's payload: one vehicle with a nested `Overview`.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::decode::{Decode, FieldPath, Fields};
use crate::encode::Encode;
use crate::error::{DecodeError, DecodeErrorKind};
use crate::format;

const ID: &str = "Id";
const SALE_STATUS: &str = "SaleStatus";
const TITLE: &str = "Title";
const OVERVIEW: &str = "Overview";
const COMMENTS: &str = "Comments";
const LOCATION: &str = "Location";
const PRICE: &str = "Price";
const PHOTOS: &str = "Photos";

/// Full record for a single vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarDetails {
    pub id: String,
    pub sale_status: SaleStatus,
    pub title: String,
    pub overview: Overview,
    pub comments: String,
}

impl CarDetails {
    pub fn price_string(&self) -> String {
        format::price_display(self.overview.price.as_deref())
    }

    pub fn location_string(&self) -> String {
        format::location_display(self.overview.location.as_deref())
    }

    pub fn photos(&self) -> &[String] {
        &self.overview.photos
    }

    /// Preview record with representative values.
    pub fn sample() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sale_status: SaleStatus::default(),
            title: "2019 Mercedes Benz C300 Coupe".to_string(),
            overview: Overview {
                location: Some("New South Wales".to_string()),
                price: Some("$103,400".to_string()),
                photos: Vec::new(),
            },
            comments: "Single owner, full service history, always garaged.".to_string(),
        }
    }
}

impl Decode for CarDetails {
    fn decode(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        let fields = Fields::of(value, path)?;
        Ok(Self {
            id: fields.required(ID)?,
            sale_status: fields.required(SALE_STATUS)?,
            title: fields.required(TITLE)?,
            overview: fields.required(OVERVIEW)?,
            comments: fields.or_default(COMMENTS)?,
        })
    }
}

impl Encode for CarDetails {
    fn encode(&self) -> Value {
        let mut map = Map::new();
        map.insert(ID.to_string(), self.id.encode());
        map.insert(SALE_STATUS.to_string(), self.sale_status.encode());
        map.insert(TITLE.to_string(), self.title.encode());
        map.insert(OVERVIEW.to_string(), self.overview.encode());
        map.insert(COMMENTS.to_string(), self.comments.encode());
        Value::Object(map)
    }
}

/// The nested `Overview` object of a details payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overview {
    pub location: Option<String>,
    pub price: Option<String>,
    pub photos: Vec<String>,
}

impl Decode for Overview {
    fn decode(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        let fields = Fields::of(value, path)?;
        Ok(Self {
            location: fields.optional(LOCATION)?,
            price: fields.optional(PRICE)?,
            photos: fields.or_default(PHOTOS)?,
        })
    }
}

impl Encode for Overview {
    fn encode(&self) -> Value {
        let mut map = Map::new();
        map.insert(LOCATION.to_string(), self.location.encode());
        map.insert(PRICE.to_string(), self.price.encode());
        map.insert(PHOTOS.to_string(), self.photos.encode());
        Value::Object(map)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SaleStatus {
    Available,
    #[default]
    ComingSoon,
}

impl SaleStatus {
    const NAMES: &'static [&'static str] = &["Available", "Coming Soon"];

    pub fn as_str(self) -> &'static str {
        match self {
            SaleStatus::Available => "Available",
            SaleStatus::ComingSoon => "Coming Soon",
        }
    }
}

impl Decode for SaleStatus {
    fn decode(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        let raw = String::decode(value, path)?;
        match raw.as_str() {
            "Available" => Ok(SaleStatus::Available),
            "Coming Soon" => Ok(SaleStatus::ComingSoon),
            _ => Err(DecodeError::new(
                path.clone(),
                DecodeErrorKind::UnknownVariant {
                    found: raw,
                    expected: Self::NAMES,
                },
            )),
        }
    }
}

impl Encode for SaleStatus {
    fn encode(&self) -> Value {
        Value::String(self.as_str().to_string())
    }
}
