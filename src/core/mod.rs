//! Core-Bausteine: Kamera-Projektion, Abbruch-Tickets, Settle-Queue.

pub mod camera;
pub mod settle;
pub mod ticket;

pub use camera::Camera2D;
pub use settle::SettleQueue;
pub use ticket::{Ticket, TicketSlot};
