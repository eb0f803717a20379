use mongodb::{options::ClientOptions, Client, Collection, Database as MongoDatabase};
use tracing::info;

use crate::models::events::{QuizAttempt, UserNote, ViewEvent};
use crate::models::overlay::OverlayRow;
use crate::models::settings::SettingRow;
use crate::models::video::VideoRow;

/// Database connection wrapper.
///
/// Each logical sheet of the original tabular store maps to one collection;
/// the accessors below are the only place collection names appear.
#[derive(Clone)]
pub struct Database {
    pub client: Client,
    pub database: MongoDatabase,
}

impl Database {
    /// Connect and verify the connection by listing database names.
    pub async fn new(database_url: &str, db_name: &str) -> Result<Self, mongodb::error::Error> {
        info!("Connecting to MongoDB: {}", database_url);

        let mut client_options = ClientOptions::parse(database_url).await?;
        client_options.app_name = Some("vidquiz-overlay-app".to_string());

        let client = Client::with_options(client_options)?;
        let database = client.database(db_name);

        client.list_database_names(None, None).await?;

        info!("MongoDB connection established successfully");

        Ok(Self { client, database })
    }

    /// Video catalog; managed externally, read-only here.
    pub fn videos(&self) -> Collection<VideoRow> {
        self.database.collection("videos")
    }

    /// Raw overlay definition rows, in source sheet order.
    pub fn overlay_rows(&self) -> Collection<OverlayRow> {
        self.database.collection("overlay_rows")
    }

    pub fn quiz_attempts(&self) -> Collection<QuizAttempt> {
        self.database.collection("quiz_attempts")
    }

    pub fn user_events(&self) -> Collection<ViewEvent> {
        self.database.collection("user_events")
    }

    pub fn user_notes(&self) -> Collection<UserNote> {
        self.database.collection("user_notes")
    }

    pub fn settings(&self) -> Collection<SettingRow> {
        self.database.collection("settings")
    }
}
