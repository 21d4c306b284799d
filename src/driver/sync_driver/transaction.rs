// src/driver/sync_driver/transaction.rs

use super::Sht21;
use crate::common::{
    command::Command,
    error::Sht21Error,
    frame::RequestFrame,
    hal_traits::{BusFault, Sht21Bus, Sht21Timer},
    measurement::RawReading,
    timing,
};

impl<IF> Sht21<IF>
where
    IF: Sht21Bus + Sht21Timer,
{
    /// Sends `command`, waits out its conversion time and reads the response into `buffer`.
    ///
    /// A failed transmit returns at once; the settle delay and the receive are skipped.
    pub(super) fn execute_read(
        &mut self,
        command: Command,
        buffer: &mut [u8],
    ) -> Result<(), Sht21Error<IF::Error>> {
        let frame = RequestFrame::build(command);
        trace!(
            "sht21: tx {:#x} (hold: {}), expecting {} bytes",
            frame.command_code(),
            command.is_hold(),
            buffer.len()
        );

        self.interface
            .transmit(frame.address(), &[frame.command_code()])
            .map_err(bus_error::<IF>)?;

        if let Some(settle) = command.settling_time() {
            self.interface.delay_ms(timing::as_millis_u32(settle));
        }

        self.interface
            .receive(frame.address(), buffer)
            .map_err(bus_error::<IF>)
    }

    /// Sends `command` followed by an optional payload byte. No receive phase.
    pub(super) fn execute_write(
        &mut self,
        command: Command,
        payload: Option<u8>,
    ) -> Result<(), Sht21Error<IF::Error>> {
        let frame = RequestFrame::build(command);
        let tx = [frame.command_code(), payload.unwrap_or(0)];
        let len = if payload.is_some() { 2 } else { 1 };
        trace!("sht21: tx {:#x}, {} payload bytes", frame.command_code(), len - 1);

        self.interface
            .transmit(frame.address(), &tx[..len])
            .map_err(bus_error::<IF>)
    }

    /// Runs a measurement command and returns the unchecked three-byte response.
    pub(super) fn read_raw(&mut self, command: Command) -> Result<RawReading, Sht21Error<IF::Error>> {
        let mut buffer = [0u8; 3];
        self.execute_read(command, &mut buffer)?;
        Ok(RawReading::new(buffer))
    }
}

/// Sorts a bus error into the matching [`Sht21Error`] variant.
fn bus_error<IF: Sht21Bus>(error: IF::Error) -> Sht21Error<IF::Error> {
    let fault = IF::fault(&error);
    debug!("sht21: bus fault {:?}", fault);
    match fault {
        BusFault::NoAcknowledge => Sht21Error::NoAcknowledge(error),
        BusFault::Timeout => Sht21Error::Timeout(error),
        BusFault::Other => Sht21Error::Io(error),
    }
}
