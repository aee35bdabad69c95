pub mod businessdb;
pub mod communitydb;
pub mod db;
pub mod jobdb;
pub mod productdb;
pub mod userdb;
