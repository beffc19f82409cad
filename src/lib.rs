//! synthfit - synthetic linear data, least-squares fitting and residual analysis
//!
//! This library generates a seeded synthetic sample around a configured line,
//! fits an ordinary least-squares regression to it, evaluates the fit (MSE,
//! R², residuals) and ranks the points with the largest residuals. Each run
//! is a pure function of its [`params::ParameterSet`].

pub mod cli;
pub mod config;
pub mod csv_output;
pub mod error;
pub mod evaluator;
pub mod fitter;
pub mod generator;
pub mod json_output;
pub mod outliers;
pub mod params;
pub mod pipeline;
pub mod sample;
pub mod text_output;
