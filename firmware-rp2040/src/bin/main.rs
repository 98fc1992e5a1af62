#![no_std]
#![no_main]

use camel_pad_rp2040::config::{BUTTON_COUNT, POLL_INTERVAL_MS};
use camel_pad_rp2040::GpioButtons;
use defmt::{info, unwrap};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Ticker};
use embassy_usb::class::hid::State;
use embassy_usb::{Builder, Config as UsbConfig};
use static_cell::StaticCell;

#[cfg(feature = "macro-keys")]
use camel_pad_rp2040::{
    config::{BUTTONS, GESTURE_QUEUE_DEPTH, TIMING},
    configure_usb_keyboard, ActionDispatcher, GestureEvent, Pad, UsbKeyboard,
};
#[cfg(feature = "macro-keys")]
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
#[cfg(feature = "host-link")]
use camel_pad_rp2040::{
    configure_usb_vendor, run_vendor_reader, usb_vendor::VendorReader, HostLink, InboundReports,
    UsbVendorTransport,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<USB>;
});

/// Gestures fired by the poll task, typed in order by the action task.
#[cfg(feature = "macro-keys")]
type GestureQueue = Channel<CriticalSectionRawMutex, GestureEvent, GESTURE_QUEUE_DEPTH>;

#[cfg(feature = "macro-keys")]
static GESTURES: StaticCell<GestureQueue> = StaticCell::new();

/// Reports from the host, filled by the vendor reader task.
#[cfg(feature = "host-link")]
static INBOUND: StaticCell<InboundReports> = StaticCell::new();

/// USB device configuration buffer.
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// HID state.
static HID_STATE: StaticCell<State> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Camel pad starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- Buttons ---
    let buttons = GpioButtons::new([
        p.PIN_2.into(),
        p.PIN_3.into(),
        p.PIN_4.into(),
        p.PIN_5.into(),
    ]);

    // --- USB Setup ---
    let usb_driver = Driver::new(p.USB, Irqs);

    let mut usb_config = UsbConfig::new(0x1209, 0x0001); // pid.codes test VID/PID
    usb_config.manufacturer = Some("Camel Pad");
    usb_config.product = Some("Camel Pad Macro Keyboard");
    usb_config.serial_number = Some("001");
    usb_config.max_power = 100;
    usb_config.max_packet_size_0 = 64;

    let config_descriptor = CONFIG_DESCRIPTOR.init([0; 256]);
    let bos_descriptor = BOS_DESCRIPTOR.init([0; 256]);
    let msos_descriptor = MSOS_DESCRIPTOR.init([0; 256]);
    let control_buf = CONTROL_BUF.init([0; 64]);

    let mut builder = Builder::new(
        usb_driver,
        usb_config,
        config_descriptor,
        bos_descriptor,
        msos_descriptor,
        control_buf,
    );

    let hid_state = HID_STATE.init(State::new());

    #[cfg(feature = "macro-keys")]
    {
        let keyboard = UsbKeyboard::new(configure_usb_keyboard(&mut builder, hid_state));
        let gestures = GESTURES.init(Channel::new());

        spawner.spawn(unwrap!(usb_task(builder.build())));
        spawner.spawn(unwrap!(poll_task(buttons, gestures)));
        spawner.spawn(unwrap!(action_task(keyboard, gestures)));
    }

    #[cfg(feature = "host-link")]
    {
        let (reader, writer) = configure_usb_vendor(&mut builder, hid_state);
        let inbound = INBOUND.init(Channel::new());
        let transport = UsbVendorTransport::new(writer, inbound);

        spawner.spawn(unwrap!(usb_task(builder.build())));
        spawner.spawn(unwrap!(vendor_reader_task(reader, inbound)));
        spawner.spawn(unwrap!(link_task(buttons, transport)));
    }

    info!("Camel pad initialized");
}

/// USB device task - runs the USB stack.
#[embassy_executor::task]
async fn usb_task(mut device: embassy_usb::UsbDevice<'static, Driver<'static, USB>>) {
    device.run().await;
}

/// Poll task - samples the buttons every tick and queues fired gestures.
#[cfg(feature = "macro-keys")]
#[embassy_executor::task]
async fn poll_task(
    mut buttons: GpioButtons<'static, BUTTON_COUNT>,
    gestures: &'static GestureQueue,
) {
    let mut pad = Pad::new(TIMING, &BUTTONS);
    info!(
        "Buttons: {}, configured: {}, timing: {}",
        BUTTON_COUNT,
        pad.configured_buttons(),
        TIMING
    );

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    loop {
        for event in pad.poll(&mut buttons, camel_pad_rp2040::now()) {
            defmt::debug!("Button {}: {}", event.button, event.gesture);
            // Never block detection on a slow host
            if gestures.try_send(event).is_err() {
                defmt::warn!("Gesture queue full, dropping {}", event.gesture);
            }
        }
        ticker.next().await;
    }
}

/// Action task - types the combos bound to each fired gesture.
#[cfg(feature = "macro-keys")]
#[embassy_executor::task]
async fn action_task(mut keyboard: UsbKeyboard<'static>, gestures: &'static GestureQueue) {
    keyboard.wait_ready().await;
    info!("USB keyboard ready, waiting for gestures...");

    let mut delay = embassy_time::Delay;
    loop {
        let event = gestures.receive().await;
        let Some(config) = BUTTONS.get(event.button) else {
            continue;
        };

        match ActionDispatcher::new(config)
            .fire(event.gesture, &mut keyboard, &mut delay)
            .await
        {
            Ok(0) => {}
            Ok(sent) => defmt::debug!(
                "Button {} {}: sent {} combo(s)",
                event.button,
                event.gesture,
                sent
            ),
            Err(e) => defmt::error!(
                "Button {} {}: output error: {:?}",
                event.button,
                event.gesture,
                e
            ),
        }
    }
}

/// Vendor reader task - queues reports sent by the host.
#[cfg(feature = "host-link")]
#[embassy_executor::task]
async fn vendor_reader_task(reader: VendorReader<'static>, inbound: &'static InboundReports) {
    run_vendor_reader(reader, inbound).await
}

/// Link task - sends button edges to the host and shows what it sends back.
#[cfg(feature = "host-link")]
#[embassy_executor::task]
async fn link_task(
    mut buttons: GpioButtons<'static, BUTTON_COUNT>,
    mut transport: UsbVendorTransport<'static>,
) {
    use pad_proto::Message;

    transport.wait_ready().await;
    info!("USB vendor HID ready, linking to host...");

    let mut link = HostLink::<_, BUTTON_COUNT>::new(transport);
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    loop {
        let levels = pad_core::sample(&mut buttons);
        if let Err(e) = link.send_levels(&levels).await {
            defmt::error!("Link error: {}", e);
        }

        while let Some(message) = link.poll_inbound() {
            match message {
                Message::DisplayText(text) => info!("Display: {}", text.as_str()),
                Message::Button(event) => {
                    defmt::debug!("Ignoring button report from host: {}", event)
                }
            }
        }

        ticker.next().await;
    }
}
