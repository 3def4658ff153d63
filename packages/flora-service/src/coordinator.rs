use std::sync::{
	Mutex,
	atomic::{AtomicU64, Ordering},
};

use flora_domain::{FilterCriteria, PlantRecord};

use crate::{PlantService, ServiceError, ServiceResult};

pub const ALL_PLANTS_LABEL: &str = "All plants";
pub const FILTERED_LABEL: &str = "Filtered plants";
/// Generic user-facing failure text; the provider-side error is logged, not
/// surfaced verbatim.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load plants.";

/// Tells the presentation layer whether the committed result set was
/// constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLabel {
	AllPlants,
	Filtered,
}
impl HeaderLabel {
	pub fn text(&self) -> &'static str {
		match self {
			Self::AllPlants => ALL_PLANTS_LABEL,
			Self::Filtered => FILTERED_LABEL,
		}
	}
}

/// Exactly one state holds at any observed instant; the coordinator replaces
/// it wholesale on every committed outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
	Idle,
	Loading,
	Ready { records: Vec<PlantRecord>, header: HeaderLabel },
	Failed { message: String },
}

/// Orchestrates fetch triggers for the lifetime of the view.
///
/// Every trigger takes the next generation; a completion is committed only
/// while its generation is still the latest issued one, so a stale in-flight
/// fetch can never overwrite a newer result. Superseded store calls still run
/// to completion and are discarded on arrival.
pub struct FetchCoordinator {
	service: PlantService,
	generation: AtomicU64,
	state: Mutex<FetchState>,
}

impl FetchCoordinator {
	pub fn new(service: PlantService) -> Self {
		Self { service, generation: AtomicU64::new(0), state: Mutex::new(FetchState::Idle) }
	}

	pub fn state(&self) -> FetchState {
		self.state.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}

	/// The explicit filter action. Zero usable criteria is a usage error:
	/// it is reported synchronously and issues no fetch and no state
	/// transition.
	pub async fn submit_filter(
		&self,
		name: &str,
		plant_type: &str,
		location: &str,
	) -> ServiceResult<()> {
		let criteria = FilterCriteria::build(name, plant_type, location);

		if criteria.is_empty() {
			return Err(ServiceError::InvalidRequest {
				message: "At least one filter category is required.".to_string(),
			});
		}

		self.trigger(criteria).await;

		Ok(())
	}

	/// Entry point for any fetch trigger: the view regaining focus or a
	/// filter submission. Callable from any state.
	pub async fn trigger(&self, criteria: FilterCriteria) {
		let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

		// Loading clears any previously displayed error.
		self.commit(generation, FetchState::Loading);

		let header =
			if criteria.is_empty() { HeaderLabel::AllPlants } else { HeaderLabel::Filtered };

		match self.service.fetch_plants(&criteria).await {
			Ok(records) => self.commit(generation, FetchState::Ready { records, header }),
			Err(err) => {
				tracing::warn!(error = %err, "Plant fetch failed.");

				self.commit(
					generation,
					FetchState::Failed { message: FETCH_FAILED_MESSAGE.to_string() },
				);
			},
		}
	}

	fn commit(&self, generation: u64, next: FetchState) {
		let mut state = self.state.lock().unwrap_or_else(|err| err.into_inner());

		if self.generation.load(Ordering::SeqCst) != generation {
			tracing::warn!(generation, "Discarding stale fetch completion.");

			return;
		}

		*state = next;
	}
}
