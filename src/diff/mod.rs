pub mod xml_diff;
