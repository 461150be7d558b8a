/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
/// Order and order book snapshot models
pub mod book;
/// Truncation and reversal of raw order book levels
pub mod normalizer;
/// Raw response models from exchange APIs
pub mod responses;
