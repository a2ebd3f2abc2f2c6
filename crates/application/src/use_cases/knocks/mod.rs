mod get_knocks;

pub use get_knocks::GetKnocksUseCase;
