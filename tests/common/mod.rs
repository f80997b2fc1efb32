//! Common test utilities
//!
//! This module is shared across all integration tests

pub mod fakes;
pub mod fixtures;

#[allow(unused_imports)]
pub use fakes::{ChatCall, RecordingGateway, ScriptedHost};
#[allow(unused_imports)]
pub use fixtures::{photo_media, test_deps, video_media, TEST_CHAT_ID};
