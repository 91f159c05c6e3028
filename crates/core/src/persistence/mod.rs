pub mod face_persister;
