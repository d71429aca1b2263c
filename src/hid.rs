//! HID report types and the report-sink boundary.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_usb::driver::EndpointError;
use usbd_hid::descriptor::generator_prelude::*;

use crate::REPORT_CHANNEL_SIZE;

/// KeyboardReport describes a report and its companion descriptor that can be
/// used to send keyboard button presses to a host and receive the status of the
/// keyboard LEDs.
#[gen_hid_descriptor(
    (collection = APPLICATION, usage_page = GENERIC_DESKTOP, usage = KEYBOARD) = {
        (usage_page = KEYBOARD, usage_min = 0xE0, usage_max = 0xE7) = {
            #[packed_bits = 8] #[item_settings(data,variable,absolute)] modifier=input;
        };
        (logical_min = 0,) = {
            #[item_settings(constant,variable,absolute)] reserved=input;
        };
        (usage_page = LEDS, usage_min = 0x01, usage_max = 0x05) = {
            #[packed_bits = 5] #[item_settings(data,variable,absolute)] leds=output;
        };
        (usage_page = KEYBOARD, usage_min = 0x00, usage_max = 0xDD) = {
            #[item_settings(data,array,absolute)] keycodes=input;
        };
    }
)]
#[allow(dead_code)]
#[derive(Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    pub modifier: u8,
    pub reserved: u8,
    pub leds: u8,
    pub keycodes: [u8; 6],
}

/// Channel carrying finished reports from the dispatcher to the HID writer.
pub type ReportChannel = Channel<CriticalSectionRawMutex, KeyboardReport, REPORT_CHANNEL_SIZE>;
pub type ReportSender<'a> = Sender<'a, CriticalSectionRawMutex, KeyboardReport, REPORT_CHANNEL_SIZE>;
pub type ReportReceiver<'a> = Receiver<'a, CriticalSectionRawMutex, KeyboardReport, REPORT_CHANNEL_SIZE>;

/// Transport-side errors. These never reach the scan/dispatch pipeline; the
/// writer task logs and keeps running.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidError {
    UsbEndpointError(EndpointError),
    UsbDisabled,
}

/// A sink that can transmit one report to the host.
pub trait HidWriterTrait {
    /// The report type this writer accepts.
    type ReportType;

    /// Write one report to the host, returning the number of bytes written.
    async fn write_report(&mut self, report: Self::ReportType) -> Result<usize, HidError>;
}

/// A report sink that pulls its own input, usually from a [`ReportChannel`].
pub trait RunnableHidWriter: HidWriterTrait {
    /// Get the next report to be sent.
    async fn get_report(&mut self) -> Self::ReportType;

    /// Run the writer task.
    async fn run_writer(&mut self) {
        loop {
            let report = self.get_report().await;
            if self.write_report(report).await.is_err() {
                error!("failed to send hid report");
            }
        }
    }
}
