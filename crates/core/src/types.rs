/// Movie primary keys are server-generated v4 UUIDs.
pub type DbId = uuid::Uuid;
