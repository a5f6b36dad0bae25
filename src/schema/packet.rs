//! Tracker packet ingestion
//!
//! Packets are raw activity records pushed by a step tracker. The wire format
//! is not decoded yet: [`PlaceholderDecoder`] ignores its input and yields a
//! fixed record. Real decoders plug in through [`PacketDecoder`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ComputeError;

/// Date layout used by tracker packets
pub const PACKET_DATE_FORMAT: &str = "%Y%m%d";

/// Time layout used by tracker packets
pub const PACKET_TIME_FORMAT: &str = "%H:%M:%S";

/// One decoded tracker packet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    /// Date (YYYYMMDD)
    pub date: String,
    /// Time of day (HH:MM:SS)
    pub time: String,
    /// Step count
    pub steps: u32,
}

impl Packet {
    /// Combine `date` and `time` into a timestamp
    pub fn timestamp(&self) -> Result<NaiveDateTime, ComputeError> {
        let date = NaiveDate::parse_from_str(&self.date, PACKET_DATE_FORMAT)
            .map_err(|e| ComputeError::DateParseError(format!("{}: {}", self.date, e)))?;
        let time = NaiveTime::parse_from_str(&self.time, PACKET_TIME_FORMAT)
            .map_err(|e| ComputeError::DateParseError(format!("{}: {}", self.time, e)))?;
        Ok(date.and_time(time))
    }
}

/// Trait for tracker packet decoders
pub trait PacketDecoder {
    /// Decode one raw packet
    fn decode(&self, raw: &str) -> Result<Packet, ComputeError>;
}

/// Stand-in decoder that always yields the same record
pub struct PlaceholderDecoder;

impl PlaceholderDecoder {
    /// The record every packet decodes to
    pub fn placeholder() -> Packet {
        Packet {
            date: "20250628".to_string(),
            time: "12:28:00".to_string(),
            steps: 5000,
        }
    }
}

impl PacketDecoder for PlaceholderDecoder {
    fn decode(&self, _raw: &str) -> Result<Packet, ComputeError> {
        Ok(Self::placeholder())
    }
}

/// Decode `raw` with `decoder` and append the result to `packets`
pub fn process_packet_with(
    decoder: &dyn PacketDecoder,
    raw: &str,
    mut packets: Vec<Packet>,
) -> Result<Vec<Packet>, ComputeError> {
    let packet = decoder.decode(raw)?;
    append(&mut packets, raw, packet);
    Ok(packets)
}

/// Ingest one raw packet with the placeholder decoder
pub fn process_packet(raw: &str, mut packets: Vec<Packet>) -> Vec<Packet> {
    append(&mut packets, raw, PlaceholderDecoder::placeholder());
    packets
}

fn append(packets: &mut Vec<Packet>, raw: &str, packet: Packet) {
    debug!(raw, steps = packet.steps, total = packets.len() + 1, "packet processed");
    packets.push(packet);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    struct RejectingDecoder;

    impl PacketDecoder for RejectingDecoder {
        fn decode(&self, raw: &str) -> Result<Packet, ComputeError> {
            Err(ComputeError::PacketError(raw.to_string()))
        }
    }

    #[test]
    fn test_process_packet_appends_placeholder() {
        let packets = process_packet("20250628 12:28:00,5000", Vec::new());
        assert_eq!(packets, vec![PlaceholderDecoder::placeholder()]);

        let packets = process_packet("anything at all", packets);
        assert_eq!(packets.len(), 2);
        assert_eq!(packets[1].steps, 5000);
    }

    #[test]
    fn test_placeholder_ignores_input() {
        let decoder = PlaceholderDecoder;
        assert_eq!(decoder.decode("").unwrap(), decoder.decode("garbage").unwrap());
    }

    #[test]
    fn test_process_packet_with_decoder_error() {
        let packets = vec![PlaceholderDecoder::placeholder()];
        let result = process_packet_with(&RejectingDecoder, "bad", packets);
        assert!(matches!(result, Err(ComputeError::PacketError(raw)) if raw == "bad"));

        let packets = process_packet_with(&PlaceholderDecoder, "ok", Vec::new()).unwrap();
        assert_eq!(packets.len(), 1);
    }

    #[test]
    fn test_packet_timestamp() {
        let ts = PlaceholderDecoder::placeholder().timestamp().unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2025, 6, 28));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (12, 28, 0));
    }

    #[test]
    fn test_packet_timestamp_invalid() {
        let packet = Packet {
            date: "2025-06-28".to_string(),
            time: "12:28:00".to_string(),
            steps: 1,
        };
        assert!(matches!(packet.timestamp(), Err(ComputeError::DateParseError(_))));
    }
}
