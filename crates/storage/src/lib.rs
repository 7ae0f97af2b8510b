pub mod member;
pub mod package;
pub mod payment;
pub mod plan;
pub mod registration;
pub mod session;
pub mod trainer;

use eyre::Result;
use member::MemberStore;
use package::PackageStore;
use payment::PaymentStore;
use plan::PlanStore;
use registration::RegistrationStore;
use session::Db;
use trainer::TrainerStore;

/// Remote row storage: one store per entity table. Read-only by design;
/// dashboard-side edits never reach the remote tables.
#[derive(Clone)]
pub struct Storage {
    pub db: Db,
    pub members: MemberStore,
    pub trainers: TrainerStore,
    pub plans: PlanStore,
    pub packages: PackageStore,
    pub registrations: RegistrationStore,
    pub payments: PaymentStore,
}

impl Storage {
    pub async fn new(uri: &str) -> Result<Self> {
        let db = Db::connect(uri).await?;
        let members = MemberStore::new(&db);
        let trainers = TrainerStore::new(&db);
        let plans = PlanStore::new(&db);
        let packages = PackageStore::new(&db);
        let registrations = RegistrationStore::new(&db);
        let payments = PaymentStore::new(&db);

        Ok(Storage {
            db,
            members,
            trainers,
            plans,
            packages,
            registrations,
            payments,
        })
    }
}
