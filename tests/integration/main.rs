//! Integration tests

mod fakes;
mod feed_test;
mod odds_test;
mod pipeline_test;
