pub mod config;

pub mod bench {
    pub mod report;
    pub mod row;
    pub mod runner;
    pub mod scenario;
    pub mod timing;
}

pub mod db {
    pub mod mysql;
    pub mod session;
}
