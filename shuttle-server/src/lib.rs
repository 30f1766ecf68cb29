//! Shuttle departure board server.
//!
//! A web application that answers: "when is the next shuttle, and do I
//! need to run for it?" Timetables are fixed daily schedules supplied as
//! configuration; the engine handles service that continues past midnight.

pub mod board;
pub mod domain;
pub mod schedules;
pub mod web;
