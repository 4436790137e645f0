use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    auth::AuthRepositoryImpl, health::HealthCheckRepositoryImpl, lot::LotRepositoryImpl,
    reservation::ReservationRepositoryImpl, user::UserRepositoryImpl,
};
use kernel::repository::{
    auth::AuthRepository, health::HealthCheckRepository, lot::LotRepository,
    reservation::ReservationRepository, user::UserRepository,
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    lot_repository: Arc<dyn LotRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let lot_repository = Arc::new(LotRepositoryImpl::new(pool.clone()));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            lot_repository,
            reservation_repository,
        }
    }

    // ハンドラーのテストでモック実装を差し込むためのコンストラクタ
    pub fn from_parts(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        auth_repository: Arc<dyn AuthRepository>,
        user_repository: Arc<dyn UserRepository>,
        lot_repository: Arc<dyn LotRepository>,
        reservation_repository: Arc<dyn ReservationRepository>,
    ) -> Self {
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            lot_repository,
            reservation_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn lot_repository(&self) -> Arc<dyn LotRepository> {
        self.lot_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }
}
