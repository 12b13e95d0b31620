// Wire DTOs and conversions for the line-oriented input and render streams.

use crate::domain::tuning::GraphicsProfile;
use crate::domain::{HostileSnapshot, KeyCode, ProjectileSnapshot};
use crate::use_cases::{FrameEvent, FrameSnapshot, InputEvent, Settings, SettingsError};
use serde::{Deserialize, Serialize};

/// Messages the input collaborator sends, one JSON object per line.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    // DOM-style key code, e.g. `KeyW` or `ShiftLeft`.
    Key { code: String, pressed: bool },
    Trigger { pressed: bool },
    PointerLock { locked: bool },
    // Look deltas in radians.
    Look { yaw: f32, pitch: f32 },
    Settings(SettingsPayload),
}

/// Payload for the settings form (`applySettings`).
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsPayload {
    pub target_fps: u32,
    pub graphics: String,
}

/// A client message resolved into what the runtime routes it to.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Input(InputEvent),
    Settings(Settings),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProtocolError {
    UnknownKey(String),
    NonFiniteLook,
    InvalidSettings(SettingsError),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProtocolError::UnknownKey(code) => write!(f, "unknown key code '{code}'"),
            ProtocolError::NonFiniteLook => write!(f, "look delta is not finite"),
            ProtocolError::InvalidSettings(e) => write!(f, "invalid settings: {e}"),
        }
    }
}

impl TryFrom<ClientMessage> for Command {
    type Error = ProtocolError;

    fn try_from(msg: ClientMessage) -> Result<Self, Self::Error> {
        let event = match msg {
            ClientMessage::Key { code, pressed } => {
                let code = KeyCode::from_code(&code).ok_or(ProtocolError::UnknownKey(code))?;
                InputEvent::Key { code, pressed }
            }
            ClientMessage::Trigger { pressed: true } => InputEvent::TriggerPressed,
            ClientMessage::Trigger { pressed: false } => InputEvent::TriggerReleased,
            ClientMessage::PointerLock { locked } => InputEvent::PointerLock(locked),
            ClientMessage::Look { yaw, pitch } => {
                if !yaw.is_finite() || !pitch.is_finite() {
                    return Err(ProtocolError::NonFiniteLook);
                }
                InputEvent::Look {
                    yaw_delta: yaw,
                    pitch_delta: pitch,
                }
            }
            ClientMessage::Settings(payload) => {
                let settings = Settings::parse(payload.target_fps, &payload.graphics)
                    .map_err(ProtocolError::InvalidSettings)?;
                return Ok(Command::Settings(settings));
            }
        };
        Ok(Command::Input(event))
    }
}

/// One rendered frame, flattened for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct FrameDto {
    pub tick: u64,
    pub dt: f32,
    pub graphics: GraphicsDto,
    pub player: [f32; 3],
    pub hostiles: Vec<EntityDto>,
    pub projectiles: Vec<EntityDto>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<FrameEventDto>,
}

impl FrameDto {
    pub fn new(frame: &FrameSnapshot, graphics: &GraphicsProfile) -> Self {
        Self {
            tick: frame.tick,
            dt: frame.dt,
            graphics: GraphicsDto::from(graphics),
            player: frame.player.position.to_array(),
            hostiles: frame.hostiles.iter().map(EntityDto::from).collect(),
            projectiles: frame.projectiles.iter().map(EntityDto::from).collect(),
            events: frame.events.iter().map(FrameEventDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphicsDto {
    pub quality: &'static str,
    pub pixel_ratio: f32,
    pub shadows: bool,
    pub shadow_map_size: u32,
    pub anisotropy: u32,
}

impl From<&GraphicsProfile> for GraphicsDto {
    fn from(p: &GraphicsProfile) -> Self {
        Self {
            quality: p.quality.name(),
            pixel_ratio: p.pixel_ratio,
            shadows: p.shadows_enabled,
            shadow_map_size: p.shadow_map_size,
            anisotropy: p.anisotropy,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityDto {
    pub id: u64,
    pub position: [f32; 3],
    pub velocity: [f32; 3],
}

impl From<&HostileSnapshot> for EntityDto {
    fn from(h: &HostileSnapshot) -> Self {
        Self {
            id: u64::from(h.id),
            position: h.position.to_array(),
            velocity: h.velocity.to_array(),
        }
    }
}

impl From<&ProjectileSnapshot> for EntityDto {
    fn from(p: &ProjectileSnapshot) -> Self {
        Self {
            id: p.id,
            position: p.position.to_array(),
            velocity: p.velocity.to_array(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum FrameEventDto {
    ProjectileFired {
        id: u64,
        origin: [f32; 3],
        direction: [f32; 3],
    },
    ProjectileExpired {
        id: u64,
    },
}

impl From<&FrameEvent> for FrameEventDto {
    fn from(ev: &FrameEvent) -> Self {
        match *ev {
            FrameEvent::ProjectileFired {
                id,
                origin,
                direction,
            } => FrameEventDto::ProjectileFired {
                id,
                origin: origin.to_array(),
                direction: direction.to_array(),
            },
            FrameEvent::ProjectileExpired { id } => FrameEventDto::ProjectileExpired { id },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tuning::GraphicsQuality;
    use glam::Vec3;

    fn parse(line: &str) -> Result<Command, ProtocolError> {
        let msg: ClientMessage = serde_json::from_str(line).expect("valid json");
        Command::try_from(msg)
    }

    #[test]
    fn key_messages_map_to_input_events() {
        assert_eq!(
            parse(r#"{"type":"Key","data":{"code":"KeyW","pressed":true}}"#),
            Ok(Command::Input(InputEvent::Key {
                code: KeyCode::Forward,
                pressed: true
            }))
        );
        assert_eq!(
            parse(r#"{"type":"Key","data":{"code":"KeyQ","pressed":true}}"#),
            Err(ProtocolError::UnknownKey("KeyQ".to_string()))
        );
    }

    #[test]
    fn trigger_and_lock_messages() {
        assert_eq!(
            parse(r#"{"type":"Trigger","data":{"pressed":true}}"#),
            Ok(Command::Input(InputEvent::TriggerPressed))
        );
        assert_eq!(
            parse(r#"{"type":"Trigger","data":{"pressed":false}}"#),
            Ok(Command::Input(InputEvent::TriggerReleased))
        );
        assert_eq!(
            parse(r#"{"type":"PointerLock","data":{"locked":true}}"#),
            Ok(Command::Input(InputEvent::PointerLock(true)))
        );
    }

    #[test]
    fn settings_message_is_validated() {
        let ok = parse(r#"{"type":"Settings","data":{"target_fps":30,"graphics":"hd"}}"#);
        match ok {
            Ok(Command::Settings(s)) => {
                assert_eq!(s.target_fps.get(), 30);
                assert_eq!(s.graphics, GraphicsQuality::Hd);
            }
            other => panic!("unexpected: {other:?}"),
        }

        let bad = parse(r#"{"type":"Settings","data":{"target_fps":0,"graphics":"hd"}}"#);
        assert!(matches!(bad, Err(ProtocolError::InvalidSettings(_))));
    }

    #[test]
    fn frame_serializes_flat_arrays() {
        let frame = FrameSnapshot {
            tick: 3,
            dt: 0.5,
            player: crate::domain::PlayerSnapshot {
                position: Vec3::new(0.0, 0.5, -3.0),
            },
            hostiles: vec![],
            projectiles: vec![],
            events: vec![FrameEvent::ProjectileExpired { id: 9 }],
        };
        let dto = FrameDto::new(&frame, &GraphicsQuality::Smooth.profile());
        let json = serde_json::to_value(&dto).expect("serializable");

        assert_eq!(json["tick"], 3);
        assert_eq!(json["player"], serde_json::json!([0.0, 0.5, -3.0]));
        assert_eq!(json["graphics"]["quality"], "smooth");
        assert_eq!(json["events"][0]["type"], "ProjectileExpired");
        assert_eq!(json["events"][0]["data"]["id"], 9);
    }
}
