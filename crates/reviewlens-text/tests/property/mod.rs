mod normalizer_properties;
