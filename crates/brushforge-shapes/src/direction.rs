//! Compass directions and door axes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which way a wedge ramp or stair flight runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(s)
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "s" | "south" => Ok(Direction::South),
            "e" | "east" => Ok(Direction::East),
            "w" | "west" => Ok(Direction::West),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

/// Axis a door pair splits along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorAxis {
    /// Doors slide apart along X; faces point north/south.
    NorthSouth,
    /// Doors slide apart along Y; faces point east/west.
    EastWest,
}

impl FromStr for DoorAxis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "0" | "ns" | "north-south" | "north_south" => Ok(DoorAxis::NorthSouth),
            "1" | "ew" | "east-west" | "east_west" => Ok(DoorAxis::EastWest),
            other => Err(format!("unknown door axis: {other}")),
        }
    }
}
