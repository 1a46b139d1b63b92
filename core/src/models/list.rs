//! The listing endpoint's payload.
//!
//! # Design
//! `ListItem` ids are minted locally on decode, so identity is by wire
//! content: equality ignores `id`, and an encode/decode round trip yields an
//! equal item even though its id changes.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::decode::{Decode, FieldPath, Fields};
use crate::encode::Encode;
use crate::error::DecodeError;
use crate::format;

const RESULT: &str = "Result";
const ID: &str = "Id";
const TITLE: &str = "Title";
const LOCATION: &str = "Location";
const PRICE: &str = "Price";
const MAIN_PHOTO: &str = "MainPhoto";
const DETAILS_URL: &str = "DetailsUrl";

/// The listing endpoint's response: items in server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListResult {
    pub objects: Vec<ListItem>,
}

impl ListResult {
    pub fn new(objects: Vec<ListItem>) -> Self {
        Self { objects }
    }
}

impl Decode for ListResult {
    fn decode(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        let fields = Fields::of(value, path)?;
        Ok(Self {
            objects: fields.required(RESULT)?,
        })
    }
}

impl Encode for ListResult {
    fn encode(&self) -> Value {
        let mut map = Map::new();
        map.insert(RESULT.to_string(), self.objects.encode());
        Value::Object(map)
    }
}

/// One vehicle in the listing.
///
/// `id` is generated locally on every decode; a wire `Id` is ignored, so two
/// decodes of the same payload produce items with different ids. Equality
/// compares the wire fields only.
#[derive(Debug, Clone)]
pub struct ListItem {
    pub id: String,
    pub title: String,
    pub photo_path: String,
    pub details_url: String,
    location: Option<String>,
    price: Option<String>,
}

impl ListItem {
    pub fn new(
        title: impl Into<String>,
        location: Option<String>,
        price: Option<String>,
        photo_path: impl Into<String>,
        details_url: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            photo_path: photo_path.into(),
            details_url: details_url.into(),
            location,
            price,
        }
    }

    /// Preview item with representative values.
    pub fn sample() -> Self {
        Self::new(
            "2019 Mercedes Benz C300",
            Some("New South Wales".to_string()),
            Some("$103,400".to_string()),
            "",
            "",
        )
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    pub fn price_string(&self) -> String {
        format::price_display(self.price())
    }

    pub fn location_string(&self) -> String {
        format::location_display(self.location())
    }
}

impl PartialEq for ListItem {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.photo_path == other.photo_path
            && self.details_url == other.details_url
            && self.location == other.location
            && self.price == other.price
    }
}

impl Eq for ListItem {}

impl Decode for ListItem {
    fn decode(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        let fields = Fields::of(value, path)?;
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title: fields.required(TITLE)?,
            photo_path: fields.required(MAIN_PHOTO)?,
            details_url: fields.required(DETAILS_URL)?,
            location: fields.optional(LOCATION)?,
            price: fields.optional(PRICE)?,
        })
    }
}

impl Encode for ListItem {
    fn encode(&self) -> Value {
        let mut map = Map::new();
        map.insert(ID.to_string(), self.id.encode());
        map.insert(TITLE.to_string(), self.title.encode());
        map.insert(LOCATION.to_string(), self.location.encode());
        map.insert(PRICE.to_string(), self.price.encode());
        map.insert(MAIN_PHOTO.to_string(), self.photo_path.encode());
        map.insert(DETAILS_URL.to_string(), self.details_url.encode());
        Value::Object(map)
    }
}
