mod get_devices;
mod register_device;
mod update_device;

pub use get_devices::GetDevicesUseCase;
pub use register_device::RegisterDeviceUseCase;
pub use update_device::UpdateDeviceUseCase;
