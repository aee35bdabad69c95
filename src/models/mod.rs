pub mod businessmodel;
pub mod communitymodel;
pub mod jobmodel;
pub mod productmodel;
pub mod usermodel;
