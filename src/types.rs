pub mod city;
pub mod hourly_record;
