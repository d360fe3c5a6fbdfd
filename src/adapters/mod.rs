pub mod openpgp;
