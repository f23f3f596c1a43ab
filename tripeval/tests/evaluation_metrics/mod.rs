pub mod triplet_recall;
