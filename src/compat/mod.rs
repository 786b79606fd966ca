//! Compatibility engine
//!
//! Pure derivation from the current build to a list of heuristic issues.
//! Rules run in a fixed order and are independent of one another: none
//! short-circuits the rest, and a slot that is absent is skipped rather
//! than flagged. Equal builds always yield equal issue lists.
//!
//! Rule order: socket, RAM type, PSU wattage, storage interface.

use crate::build::Slots;
use crate::part::category;
use serde::Serialize;
use std::fmt;

/// One heuristic warning about the current build.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompatIssue {
    /// CPU and motherboard sockets differ (case-sensitive comparison).
    SocketMismatch {
        cpu_socket: String,
        board_socket: String,
    },
    /// RAM type differs from what the motherboard takes.
    RamTypeMismatch {
        ram_type: String,
        board_ram_type: String,
    },
    /// PSU wattage is below the summed TDP draw of the other components.
    /// Strict comparison: a PSU exactly at the estimate is not flagged.
    InsufficientWattage { wattage: u32, estimated_draw: u32 },
    /// Storage interface differs from what the motherboard exposes.
    InterfaceMismatch {
        storage_interface: String,
        board_interface: String,
    },
}

impl fmt::Display for CompatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompatIssue::SocketMismatch {
                cpu_socket,
                board_socket,
            } => write!(
                f,
                "CPU socket {} does not match motherboard socket {}",
                cpu_socket, board_socket
            ),
            CompatIssue::RamTypeMismatch {
                ram_type,
                board_ram_type,
            } => write!(
                f,
                "RAM type {} does not match motherboard RAM type {}",
                ram_type, board_ram_type
            ),
            CompatIssue::InsufficientWattage {
                wattage,
                estimated_draw,
            } => write!(
                f,
                "PSU wattage {}W is below the estimated component draw of {}W",
                wattage, estimated_draw
            ),
            CompatIssue::InterfaceMismatch {
                storage_interface,
                board_interface,
            } => write!(
                f,
                "Storage interface {} does not match motherboard interface {}",
                storage_interface, board_interface
            ),
        }
    }
}

/// Run every rule over whichever slots are present.
pub fn check_issues(slots: &Slots) -> Vec<CompatIssue> {
    let mut issues = Vec::new();

    let cpu = slots.get(category::CPU);
    let board = slots.get(category::MOTHERBOARD);
    let ram = slots.get(category::RAM);
    let storage = slots.get(category::STORAGE);
    let psu = slots.get(category::PSU);

    if let (Some(cpu), Some(board)) = (cpu, board) {
        if let (Some(cpu_socket), Some(board_socket)) = (&cpu.socket, &board.socket) {
            if cpu_socket != board_socket {
                issues.push(CompatIssue::SocketMismatch {
                    cpu_socket: cpu_socket.clone(),
                    board_socket: board_socket.clone(),
                });
            }
        }
    }

    if let (Some(ram), Some(board)) = (ram, board) {
        if let (Some(ram_type), Some(board_ram_type)) = (&ram.ram_type, &board.ram_type) {
            if ram_type != board_ram_type {
                issues.push(CompatIssue::RamTypeMismatch {
                    ram_type: ram_type.clone(),
                    board_ram_type: board_ram_type.clone(),
                });
            }
        }
    }

    // A PSU without a wattage rating is skipped, not flagged.
    if let Some(psu) = psu {
        if let Some(wattage) = psu.wattage {
            let estimated_draw: u32 = slots
                .iter()
                .filter(|(slot, _)| slot.as_str() != category::PSU)
                .filter_map(|(_, part)| part.tdp)
                .sum();
            if wattage < estimated_draw {
                issues.push(CompatIssue::InsufficientWattage {
                    wattage,
                    estimated_draw,
                });
            }
        }
    }

    if let (Some(storage), Some(board)) = (storage, board) {
        if let (Some(storage_interface), Some(board_interface)) =
            (&storage.interface, &board.interface)
        {
            if storage_interface != board_interface {
                issues.push(CompatIssue::InterfaceMismatch {
                    storage_interface: storage_interface.clone(),
                    board_interface: board_interface.clone(),
                });
            }
        }
    }

    issues
}
