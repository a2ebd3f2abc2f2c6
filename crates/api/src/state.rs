use knockknock_application::ports::{DeviceRepository, SightingRepository};
use knockknock_application::use_cases::{
    GetDevicesUseCase, GetKnocksUseCase, GetSightingsUseCase, RecordSightingUseCase,
    RegisterDeviceUseCase, UpdateDeviceUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DeviceUseCases {
    pub get_devices: Arc<GetDevicesUseCase>,
    pub register_device: Arc<RegisterDeviceUseCase>,
    pub update_device: Arc<UpdateDeviceUseCase>,
}

#[derive(Clone)]
pub struct SightingUseCases {
    pub record_sighting: Arc<RecordSightingUseCase>,
    pub get_sightings: Arc<GetSightingsUseCase>,
    pub get_knocks: Arc<GetKnocksUseCase>,
}

#[derive(Clone)]
pub struct AppState {
    pub devices: DeviceUseCases,
    pub sightings: SightingUseCases,
}

impl AppState {
    pub fn from_repositories(
        device_repo: Arc<dyn DeviceRepository>,
        sighting_repo: Arc<dyn SightingRepository>,
        knock_active_secs: i64,
    ) -> Self {
        Self {
            devices: DeviceUseCases {
                get_devices: Arc::new(GetDevicesUseCase::new(device_repo.clone())),
                register_device: Arc::new(RegisterDeviceUseCase::new(device_repo.clone())),
                update_device: Arc::new(UpdateDeviceUseCase::new(device_repo)),
            },
            sightings: SightingUseCases {
                record_sighting: Arc::new(RecordSightingUseCase::new(sighting_repo.clone())),
                get_sightings: Arc::new(GetSightingsUseCase::new(sighting_repo.clone())),
                get_knocks: Arc::new(
                    GetKnocksUseCase::new(sighting_repo).with_active_threshold(knock_active_secs),
                ),
            },
        }
    }
}
