//! USB device plumbing: builder setup and the HID writer task.

use embassy_usb::class::hid::{self, HidWriter, State};
use embassy_usb::driver::Driver;
use embassy_usb::{Builder, Handler};
use static_cell::StaticCell;
use usbd_hid::descriptor::SerializedDescriptor;

use crate::config::KeyboardUsbConfig;
use crate::hid::{HidError, HidWriterTrait, KeyboardReport, ReportReceiver, RunnableHidWriter};

/// Pulls finished reports off the report channel and writes them to the
/// boot-keyboard IN endpoint.
pub struct UsbKeyboardWriter<'a, 'd, D: Driver<'d>> {
    writer: &'a mut HidWriter<'d, D, 8>,
    receiver: ReportReceiver<'a>,
}

impl<'a, 'd, D: Driver<'d>> UsbKeyboardWriter<'a, 'd, D> {
    pub fn new(writer: &'a mut HidWriter<'d, D, 8>, receiver: ReportReceiver<'a>) -> Self {
        Self { writer, receiver }
    }
}

impl<'d, D: Driver<'d>> HidWriterTrait for UsbKeyboardWriter<'_, 'd, D> {
    type ReportType = KeyboardReport;

    async fn write_report(&mut self, report: Self::ReportType) -> Result<usize, HidError> {
        self.writer
            .write_serialize(&report)
            .await
            .map_err(HidError::UsbEndpointError)?;
        Ok(8)
    }
}

impl<'d, D: Driver<'d>> RunnableHidWriter for UsbKeyboardWriter<'_, 'd, D> {
    async fn get_report(&mut self) -> Self::ReportType {
        self.receiver.receive().await
    }
}

/// Build the USB device with the identity from [`KeyboardUsbConfig`].
pub fn new_usb_builder<'d, D: Driver<'d>>(driver: D, keyboard_config: KeyboardUsbConfig<'d>) -> Builder<'d, D> {
    let mut usb_config = embassy_usb::Config::new(keyboard_config.vid, keyboard_config.pid);
    usb_config.manufacturer = Some(keyboard_config.manufacturer);
    usb_config.product = Some(keyboard_config.product_name);
    usb_config.serial_number = Some(keyboard_config.serial_number);
    usb_config.max_power = 450;

    // Required for windows compatibility.
    usb_config.max_packet_size_0 = 64;
    usb_config.device_class = 0xEF;
    usb_config.device_sub_class = 0x02;
    usb_config.device_protocol = 0x01;
    usb_config.composite_with_iads = true;

    const USB_BUF_SIZE: usize = 128;

    static CONFIG_DESC: StaticCell<[u8; USB_BUF_SIZE]> = StaticCell::new();
    static BOS_DESC: StaticCell<[u8; 16]> = StaticCell::new();
    static MSOS_DESC: StaticCell<[u8; 16]> = StaticCell::new();
    static CONTROL_BUF: StaticCell<[u8; USB_BUF_SIZE]> = StaticCell::new();

    let mut builder = Builder::new(
        driver,
        usb_config,
        &mut CONFIG_DESC.init([0; USB_BUF_SIZE])[..],
        &mut BOS_DESC.init([0; 16])[..],
        &mut MSOS_DESC.init([0; 16])[..],
        &mut CONTROL_BUF.init([0; USB_BUF_SIZE])[..],
    );

    static DEVICE_HANDLER: StaticCell<UsbDeviceHandler> = StaticCell::new();
    builder.handler(DEVICE_HANDLER.init(UsbDeviceHandler::new()));

    builder
}

/// Register the boot-keyboard HID interface on the builder.
pub fn register_keyboard_writer<'d, D: Driver<'d>>(
    builder: &mut Builder<'d, D>,
    state: &'d mut State<'d>,
) -> HidWriter<'d, D, 8> {
    let hid_config = hid::Config {
        report_descriptor: KeyboardReport::desc(),
        request_handler: None,
        poll_ms: 1,
        max_packet_size: 8,
        hid_subclass: hid::HidSubclass::Boot,
        hid_boot_protocol: hid::HidBootProtocol::Keyboard,
    };
    HidWriter::new(builder, state, hid_config)
}

struct UsbDeviceHandler {}

impl UsbDeviceHandler {
    fn new() -> Self {
        UsbDeviceHandler {}
    }
}

impl Handler for UsbDeviceHandler {
    fn enabled(&mut self, enabled: bool) {
        if enabled {
            info!("Device enabled");
        } else {
            info!("Device disabled");
        }
    }

    fn reset(&mut self) {
        info!("Bus reset, the Vbus current limit is 100mA");
    }

    fn addressed(&mut self, addr: u8) {
        info!("USB address set to: {}", addr);
    }

    fn configured(&mut self, configured: bool) {
        if configured {
            info!("Device configured, it may now draw up to the configured current from Vbus.")
        } else {
            info!("Device is no longer configured, the Vbus current limit is 100mA.");
        }
    }
}
