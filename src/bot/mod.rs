//! Discord bot integration.
//!
//! This module provides the bot half of the application. On connect the bot registers
//! its slash commands, announces itself through the notification sink and starts the
//! background health monitor. Incoming slash commands are dispatched by name to the
//! handlers in `command`.
//!
//! The bot is initialized during startup and runs in the foreground of `main`, while the
//! keepalive server and the monitor job run in their own tasks.
//!
//! # Gateway Intents
//!
//! The bot only requires the `GUILDS` intent; slash command interactions are delivered
//! regardless of intents.

pub mod command;
pub mod handler;
pub mod start;
