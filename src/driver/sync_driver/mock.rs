// src/driver/sync_driver/mock.rs

// Scripted bus shared by the driver tests.

use crate::common::hal_traits::{BusFault, Sht21Bus, Sht21Timer};
use heapless::{Deque, Vec};

// --- Mock Comm Error ---
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MockBusError(pub BusFault);

// --- Recorded bus activity ---
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Transmit { address: u8, bytes: Vec<u8, 4> },
    Receive { address: u8, len: usize },
    Delay(u32),
}

// --- Mock Interface ---
#[derive(Default)]
pub struct MockInterface {
    pub events: Vec<Event, 64>,
    responses: Deque<Result<Vec<u8, 3>, MockBusError>, 32>,
    transmit_count: usize,
    fail_transmit: Option<(usize, MockBusError)>,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the bytes the next receive hands back.
    pub fn stage(&mut self, data: &[u8]) -> &mut Self {
        let bytes = Vec::from_slice(data).expect("response too long for mock");
        self.responses.push_back(Ok(bytes)).expect("mock response queue full");
        self
    }

    /// Makes the next unanswered receive fail.
    pub fn stage_error(&mut self, fault: BusFault) -> &mut Self {
        self.responses
            .push_back(Err(MockBusError(fault)))
            .expect("mock response queue full");
        self
    }

    /// Makes the `nth` transmit (zero based) fail.
    pub fn fail_transmit(&mut self, nth: usize, fault: BusFault) -> &mut Self {
        self.fail_transmit = Some((nth, MockBusError(fault)));
        self
    }

    /// Bytes of every transmit, in order.
    pub fn transmitted(&self) -> std::vec::Vec<std::vec::Vec<u8>> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Transmit { bytes, .. } => Some(bytes.to_vec()),
                _ => None,
            })
            .collect()
    }

    pub fn delays(&self) -> std::vec::Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Delay(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }

    pub fn receive_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Receive { .. }))
            .count()
    }

    pub fn pending_responses(&self) -> usize {
        self.responses.len()
    }

    fn record(&mut self, event: Event) {
        self.events.push(event).expect("mock event log full");
    }
}

impl Sht21Bus for MockInterface {
    type Error = MockBusError;

    fn transmit(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        let nth = self.transmit_count;
        self.transmit_count += 1;
        if let Some((fail_at, err)) = self.fail_transmit {
            if fail_at == nth {
                return Err(err);
            }
        }
        let bytes = Vec::from_slice(bytes).expect("transmit too long for mock");
        self.record(Event::Transmit { address, bytes });
        Ok(())
    }

    fn receive(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.record(Event::Receive { address, len: buffer.len() });
        match self.responses.pop_front() {
            Some(Ok(bytes)) => {
                assert_eq!(bytes.len(), buffer.len(), "staged response has the wrong length");
                buffer.copy_from_slice(&bytes);
                Ok(())
            }
            Some(Err(err)) => Err(err),
            None => Err(MockBusError(BusFault::Timeout)),
        }
    }

    fn fault(error: &Self::Error) -> BusFault {
        error.0
    }
}

impl Sht21Timer for MockInterface {
    fn delay_ms(&mut self, ms: u32) {
        self.record(Event::Delay(ms));
    }
}
