//! Viewport and session core for the tile maze game.
//!
//! This crate owns the mapping between the transformable world layer (maze
//! tiles, player, exit marker) and the fixed scene frame. It applies pinch
//! zoom and drag pan gestures, keeps every world-layer child inside a
//! margin-adjusted window after each transform change, and runs the
//! play/win/replay session loop by forwarding pad input to a game-logic
//! collaborator once per frame.
//!
//! The host is responsible only for feeding gesture events and frame ticks
//! into the core and for reacting to the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Session state machine, win overlay, collaborator traits |
//! | [`engine`] | Testable [`engine::ViewportCore`]: pinch and pan handling |
//! | [`bounds`] | Scale-dependent bounds clamping of world-layer children |
//! | [`layer`] | World-layer node arena |
//! | [`camera`] | Points, rectangles and the viewport transform |
//! | [`input`] | Gesture event types and the pinch state machine |
//! | [`clamp`] | Order-insensitive numeric clamp |
//! | [`consts`] | Shared numeric constants (zoom limits, margins) |

pub mod bounds;
pub mod camera;
pub mod clamp;
pub mod consts;
pub mod engine;
pub mod input;
pub mod layer;
pub mod session;
