use crate::models::{Room, RoomStatus};
use crate::sources::traits::CatalogSource;
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Built-in demo catalog, used when no catalog file is configured
#[derive(Debug, Default)]
pub struct SampleSource;

impl SampleSource {
    pub fn new() -> Self {
        Self
    }

    /// Get the sample rooms
    pub fn rooms(&self) -> Vec<Room> {
        info!("📋 Generating sample room catalog");

        vec![
            Room {
                id: "room_1".to_string(),
                name: "Standard 101".to_string(),
                address: "12 Harbor Road".to_string(),
                description: "Compact room facing the courtyard.".to_string(),
                area: 18.0,
                price: 250.0,
                max_occupancy: 2,
                status: RoomStatus::Available,
                picture_urls: vec![],
                tags: vec![],
            },
            Room {
                id: "room_2".to_string(),
                name: "Deluxe 101".to_string(),
                address: "12 Harbor Road".to_string(),
                description: "Corner room with balcony and fast wifi.".to_string(),
                area: 32.0,
                price: 500.0,
                max_occupancy: 3,
                status: RoomStatus::Available,
                picture_urls: vec!["https://img.example.com/deluxe-101/1.jpg".to_string()],
                tags: vec!["wifi".to_string(), "Balcony".to_string()],
            },
            Room {
                id: "room_3".to_string(),
                name: "Garden Studio".to_string(),
                address: "4 Elm Lane".to_string(),
                description: "Ground floor studio opening onto the garden.".to_string(),
                area: 26.0,
                price: 380.0,
                max_occupancy: 2,
                status: RoomStatus::Reserved,
                picture_urls: vec![],
                tags: vec!["garden".to_string(), "pets".to_string()],
            },
            Room {
                id: "room_4".to_string(),
                name: "Loft 7".to_string(),
                address: "88 Mill Street".to_string(),
                description: "Top floor loft under the roof beams.".to_string(),
                area: 45.0,
                price: 720.0,
                max_occupancy: 4,
                status: RoomStatus::Occupied,
                picture_urls: vec![
                    "https://img.example.com/loft-7/1.jpg".to_string(),
                    "https://img.example.com/loft-7/2.jpg".to_string(),
                ],
                tags: vec![],
            },
            Room {
                id: "room_5".to_string(),
                name: "Penthouse Suite".to_string(),
                address: "88 Mill Street".to_string(),
                description: "Two bedrooms, private terrace and pool access.".to_string(),
                area: 90.0,
                price: 1_450.0,
                max_occupancy: 6,
                status: RoomStatus::Maintenance,
                picture_urls: vec!["https://img.example.com/penthouse/1.jpg".to_string()],
                tags: vec!["pool".to_string(), "WiFi".to_string(), "terrace".to_string()],
            },
        ]
    }
}

#[async_trait]
impl CatalogSource for SampleSource {
    async fn load(&self) -> Result<Vec<Room>> {
        Ok(self.rooms())
    }

    fn source_name(&self) -> &'static str {
        "sample"
    }
}
